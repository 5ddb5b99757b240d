use runcmd_domain::wire::{decode, decode_str, encode};
use runcmd_domain::{CommandError, InvokeError, ResultModel};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct BookInfo {
    name: String,
    author: String,
}

#[test]
fn decodes_ok_payload() {
    let model = decode::<BookInfo>(json!({
        "status": "ok",
        "data": {"name": "Spice", "author": "Isuna"}
    }))
    .unwrap();

    assert_eq!(
        model,
        ResultModel::Ok {
            data: BookInfo {
                name: "Spice".into(),
                author: "Isuna".into(),
            }
        }
    );
}

#[test]
fn decodes_err_payload() {
    let model = decode_str::<u32>(r#"{"status":"err","error":"disk full"}"#).unwrap();
    assert_eq!(model.err(), Some(CommandError::new("disk full")));
}

#[test]
fn unit_payload_round_trips_through_null() {
    let value = encode(&ResultModel::<(), CommandError>::success(())).unwrap();
    assert_eq!(value, json!({"status": "ok", "data": null}));
    assert!(decode::<()>(value).unwrap().is_ok());
}

#[test]
fn missing_or_unknown_status_is_a_decode_error() {
    let err = decode::<u32>(json!({"data": 1})).unwrap_err();
    assert!(matches!(err, InvokeError::Decode { .. }));

    let err = decode::<u32>(json!({"status": "pending"})).unwrap_err();
    assert!(matches!(err, InvokeError::Decode { .. }));
}

#[test]
fn payload_type_mismatch_is_a_decode_error() {
    let err = decode::<u32>(json!({"status": "ok", "data": "forty-two"})).unwrap_err();
    assert!(matches!(err, InvokeError::Decode { .. }));
    assert!(CommandError::from(err).message().starts_with("decode error:"));
}
