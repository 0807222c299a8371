pub mod request {
    pub use crate::modules::likes::api::mutation::Payload;
}

pub mod response {
    pub use crate::modules::likes::api::mutation::MutationResult;
}
