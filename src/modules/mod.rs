pub mod likes;
