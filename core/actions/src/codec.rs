use crate::{ActionEvent, HostCommand};

/// Serializes `event` as a single newline terminated JSON line
pub fn serialize_event(event: &ActionEvent) -> String {
  let mut event_data =
    serde_json::to_string(event).expect("Action events should not fail to serialize");
  event_data.push('\n');
  event_data
}

pub fn deserialize_command(command_data: &str) -> serde_json::Result<HostCommand> {
  serde_json::from_str(command_data.trim_end())
}
