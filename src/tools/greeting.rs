use crate::tool::{new_tool, Tool, ToolResult};

/// Produce a friendly greeting. Uses the name when one is given, otherwise a
/// generic greeting. An empty name counts as absent.
#[must_use]
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => {
            tracing::debug!(name = %name, "say_hello called with name");
            format!("Hello, {name}!")
        }
        _ => {
            tracing::debug!("say_hello called without a name");
            "Hello there!".into()
        }
    }
}

/// Registry binding for [`greet`], named `say_hello`.
#[must_use]
pub fn greeting_tool() -> Tool {
    new_tool(
        "say_hello",
        "Provides a simple greeting. If a name is provided, it will be used.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the person to greet."
                }
            }
        }),
        |input| async move {
            let name = input.get("name").and_then(|v| v.as_str());
            ToolResult::text(greet(name))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(greet(Some("Ava")), "Hello, Ava!");
    }

    #[test]
    fn greets_generically_without_name() {
        assert_eq!(greet(None), "Hello there!");
    }

    #[test]
    fn empty_name_is_treated_as_absent() {
        assert_eq!(greet(Some("")), "Hello there!");
    }

    #[tokio::test]
    async fn tool_extracts_name_argument() {
        let tool = greeting_tool();
        let result = (tool.handler)(serde_json::json!({"name": "Ava"})).await;
        assert_eq!(result.content[0].text, "Hello, Ava!");

        let result = (tool.handler)(serde_json::json!({})).await;
        assert_eq!(result.content[0].text, "Hello there!");
    }
}
