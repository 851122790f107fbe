//! Line-oriented JSON commands.
//!
//! Request: `{"id": .., "cmd": "..", "payload": {..}}`, one per line.
//! Response: `{"id": .., "status": "ok", "payload": {..}}` or
//! `{"id": .., "status": "error", "message": ".."}`.

use serde_json::{json, Map, Value};

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::services::guard::SubmissionGuard;
use crate::services::navigation::RecordingNavigator;
use crate::services::submit::{self, SubmitConfig};
use crate::services::transport::Transport;

mod command;
pub use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn submit_err(id: Value, e: &SubmitError) -> String {
    json!({
        "id": id,
        "status": "error",
        "kind": e.kind(),
        "message": e.to_string()
    })
    .to_string()
}

/// Everything a running core keeps between lines.
pub struct Session<T: Transport> {
    config: ClientConfig,
    transport: T,
    guard: SubmissionGuard,
}

impl<T: Transport> Session<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            guard: SubmissionGuard::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Handles one request line and returns the response line.
    pub fn handle(&self, input: &str) -> String {
        let req: Value = match serde_json::from_str(input) {
            Ok(v) => v,
            Err(_) => {
                return json!({
                    "status": "error",
                    "message": "invalid json"
                })
                .to_string();
            }
        };

        let id = get_id(&req);
        let payload = get_payload(&req);

        match Command::from(get_cmd(&req)) {
            Command::Ping => ok(id, json!({ "message": "glossar-core alive" })),

            Command::EntrySave => {
                let cfg = SubmitConfig::save_from(&self.config);
                self.run_submit(id, &cfg, payload)
            }

            Command::EntryCreate => {
                let cfg = SubmitConfig::create_from(&self.config);
                self.run_submit(id, &cfg, payload)
            }

            Command::ConfigShow => match serde_json::to_value(&self.config) {
                Ok(v) => ok(id, json!({ "config": v })),
                Err(e) => err(id, e.to_string()),
            },

            Command::Unknown => err(id, "unknown command"),
        }
    }

    fn run_submit(&self, id: Value, cfg: &SubmitConfig, payload: &Value) -> String {
        let no_fields = Map::new();
        let fields = match payload.get("fields") {
            Some(Value::Object(map)) => map,
            Some(_) => return err(id, "payload.fields must be an object"),
            None => &no_fields,
        };

        let mut nav = RecordingNavigator::default();
        match submit::submit(cfg, &self.guard, fields, &self.transport, &mut nav) {
            Ok(done) => ok(
                id,
                json!({
                    "navigate": nav.route.unwrap_or(done.route),
                    "operation": done.operation.as_str(),
                    "status": done.status,
                    "body": done.body,
                }),
            ),
            Err(e) => submit_err(id, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::services::transport::HttpReply;
    use pretty_assertions::assert_eq;

    struct Fixed(u16);

    impl Transport for Fixed {
        fn post_json(&self, _path: &str, _body: &Value) -> Result<HttpReply, TransportError> {
            Ok(HttpReply {
                status: self.0,
                body: "done".into(),
            })
        }
    }

    fn session(status: u16) -> Session<Fixed> {
        Session::new(ClientConfig::default(), Fixed(status))
    }

    fn parse(line: &str) -> Value {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn ping() {
        let v = parse(&session(200).handle(r#"{"id":1,"cmd":"ping"}"#));
        assert_eq!(v["status"], "ok");
        assert_eq!(v["id"], 1);
        assert_eq!(v["payload"]["message"], "glossar-core alive");
    }

    #[test]
    fn invalid_json_and_unknown_command() {
        let s = session(200);
        assert_eq!(parse(&s.handle("{nope"))["message"], "invalid json");
        assert_eq!(
            parse(&s.handle(r#"{"id":"x","cmd":"entry.delete"}"#))["message"],
            "unknown command"
        );
    }

    #[test]
    fn save_reports_navigation() {
        let line = r#"{"id":7,"cmd":"entry.save","payload":{"fields":{
            "eingabe_begriff":"Foo","eingabe_erklaerung":"Bar ","eintrag_id":""}}}"#;
        let v = parse(&session(201).handle(line));

        assert_eq!(v["status"], "ok");
        assert_eq!(v["payload"]["navigate"], "/app/hauptseite");
        assert_eq!(v["payload"]["operation"], "create");
        assert_eq!(v["payload"]["status"], 201);
    }

    #[test]
    fn conflict_carries_kind() {
        let line = r#"{"id":8,"cmd":"entry.save","payload":{"fields":{
            "eingabe_begriff":"Foo","eingabe_erklaerung":"Bar","eintrag_id":""}}}"#;
        let v = parse(&session(409).handle(line));

        assert_eq!(v["status"], "error");
        assert_eq!(v["kind"], "conflict");
        assert!(v["message"].as_str().unwrap().contains("Foo"));
    }

    #[test]
    fn create_without_fields_is_reference_missing() {
        let v = parse(&session(201).handle(r#"{"id":9,"cmd":"entry.create"}"#));
        assert_eq!(v["kind"], "reference_missing");
    }

    #[test]
    fn fields_must_be_object() {
        let v = parse(
            &session(201).handle(r#"{"id":9,"cmd":"entry.create","payload":{"fields":[]}}"#),
        );
        assert_eq!(v["message"], "payload.fields must be an object");
    }

    #[test]
    fn config_show_returns_effective_config() {
        let v = parse(&session(200).handle(r#"{"cmd":"config.show"}"#));
        assert_eq!(v["payload"]["config"]["create_endpoint"], "/api/v1/neu");
        assert_eq!(v["id"], Value::Null);
    }
}
