use crate::tool::{new_tool, Tool, ToolResult};

/// Produce the farewell message that concludes a conversation.
#[must_use]
pub fn farewell() -> String {
    tracing::debug!("say_goodbye called");
    "Goodbye! Have a great day.".into()
}

/// Registry binding for [`farewell`], named `say_goodbye`.
#[must_use]
pub fn farewell_tool() -> Tool {
    new_tool(
        "say_goodbye",
        "Provides a simple farewell message to conclude the conversation.",
        serde_json::json!({"type": "object", "properties": {}}),
        |_input| async { ToolResult::text(farewell()) },
    )
}
