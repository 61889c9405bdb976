//! IPC message protocol for Sketchpad
//!
//! Defines all message types exchanged between the host UI (tool bar,
//! color/size inputs, the canvas element's pointer handlers) and the
//! painting canvas, plus the session script format the headless host
//! replays.

mod commands;
mod error;
mod input;
mod messages;

pub use commands::*;
pub use error::*;
pub use input::*;
pub use messages::*;

/// Parse a recorded session: a JSON array of [`UiToCanvas`] messages
pub fn parse_script(json: &str) -> Result<Vec<UiToCanvas>, IpcError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    let found = match value {
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Object(_) => "an object",
    };
    Err(IpcError::ScriptNotArray { found })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_down_wire_shape() {
        let msg = UiToCanvas::PointerDown(PointerInput::mouse(10.0, 20.0));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "PointerDown");
        assert_eq!(json["data"]["source"], "mouse");
        assert_eq!(json["data"]["points"][0][0], 10.0);
    }

    #[test]
    fn test_unit_variant_has_no_data() {
        let json = serde_json::to_value(UiToCanvas::PointerUp).unwrap();
        assert_eq!(json["type"], "PointerUp");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_paint_command_from_json() {
        let msg = UiToCanvas::from_json(
            r##"{"type":"PaintCommand","data":{"SetColor":{"color":"#ff0000"}}}"##,
        )
        .unwrap();
        assert_eq!(
            msg,
            UiToCanvas::PaintCommand(PaintCommand::SetColor {
                color: "#ff0000".to_string()
            })
        );
    }

    #[test]
    fn test_parse_script() {
        let script = r#"[
            {"type":"Layout","data":{"left":0,"top":0,"width":854,"height":480}},
            {"type":"PointerDown","data":{"source":"touch","points":[[1,2],[3,4]]}},
            {"type":"PointerLeave"},
            {"type":"PaintCommand","data":"Export"}
        ]"#;
        let messages = parse_script(script).unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(
            messages[1],
            UiToCanvas::PointerDown(PointerInput::touch(vec![[1.0, 2.0], [3.0, 4.0]]))
        );
        assert_eq!(messages[3], UiToCanvas::PaintCommand(PaintCommand::Export));
    }

    #[test]
    fn test_parse_script_rejects_object() {
        let err = parse_script(r#"{"type":"PointerUp"}"#).unwrap_err();
        assert!(matches!(err, IpcError::ScriptNotArray { found: "an object" }));
    }

    #[test]
    fn test_canvas_to_ui_json() {
        let json = CanvasToUi::Exported {
            filename: "paint-2024-01-01T00-00-00.png".to_string(),
            size_bytes: 42,
        }
        .to_json()
        .unwrap();
        assert!(json.contains(r#""type":"Exported""#));
        assert!(json.contains(r#""size_bytes":42"#));
    }

    #[test]
    fn test_tiles_changed_json() {
        let json = CanvasToUi::TilesChanged {
            tiles: vec![[0, 0, 128, 128], [128, 0, 44, 128]],
        }
        .to_json()
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"TilesChanged","data":{"tiles":[[0,0,128,128],[128,0,44,128]]}}"#
        );
    }
}
