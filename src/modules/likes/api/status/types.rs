pub mod request {
    use serde::Serialize;

    #[derive(Clone, Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Query {
        pub cafe_id: i64,
        pub user_id: String,
    }
}

pub mod response {
    use crate::modules::likes::error::Error;
    use serde::Deserialize;
    use serde_json::{Map, Value};

    /// Body of `GET /api/likes` as sent on the wire.
    #[derive(Debug, Deserialize)]
    #[serde(transparent)]
    pub struct RawStatus(pub Map<String, Value>);

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct LikeStatus {
        pub likes: bool,
    }

    impl TryFrom<RawStatus> for LikeStatus {
        type Error = Error;

        fn try_from(raw: RawStatus) -> Result<Self, Self::Error> {
            match raw.0.get("likes").cloned() {
                Some(Value::Bool(likes)) => Ok(Self { likes }),
                Some(other) => Err(Error::ContractViolation(format!(
                    "expected boolean `likes`, got {}",
                    other
                ))),
                None => Err(Error::Parse("missing `likes` field".to_string())),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn decode(body: &str) -> Result<LikeStatus, Error> {
            serde_json::from_str::<RawStatus>(body)
                .map_err(|err| Error::Parse(err.to_string()))
                .and_then(LikeStatus::try_from)
        }

        #[test]
        fn accepts_strict_booleans() {
            assert_eq!(decode(r#"{"likes": true}"#).unwrap(), LikeStatus { likes: true });
            assert_eq!(decode(r#"{"likes": false}"#).unwrap(), LikeStatus { likes: false });
        }

        #[test]
        fn truthy_values_are_contract_violations() {
            assert!(matches!(
                decode(r#"{"likes": 1}"#),
                Err(Error::ContractViolation(_))
            ));
            assert!(matches!(
                decode(r#"{"likes": "yes"}"#),
                Err(Error::ContractViolation(_))
            ));
            assert!(matches!(
                decode(r#"{"likes": null}"#),
                Err(Error::ContractViolation(_))
            ));
        }

        #[test]
        fn missing_field_is_parse_error() {
            assert!(matches!(decode("{}"), Err(Error::Parse(_))));
        }
    }
}
