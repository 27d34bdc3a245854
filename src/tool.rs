use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

/// Result of a tool invocation, as handed back to the orchestration runtime.
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
    pub is_error: bool,
}

#[derive(Debug, Clone)]
pub struct ToolResultContent {
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    /// A result carrying an opaque JSON payload, serialized as text.
    #[must_use]
    pub fn json(value: &Value) -> Self {
        Self::text(value.to_string())
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: message.into(),
            }],
            is_error: true,
        }
    }

    /// Render the result as the JSON shape the runtime expects.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let content: Vec<Value> = self
            .content
            .iter()
            .map(|c| {
                serde_json::json!({
                    "type": c.content_type,
                    "text": c.text,
                })
            })
            .collect();

        serde_json::json!({
            "content": content,
            "isError": self.is_error,
        })
    }
}

/// Async handler for a tool invocation.
pub type ToolHandler =
    Arc<dyn Fn(Value) -> Pin<Box<dyn Future<Output = ToolResult> + Send>> + Send + Sync>;

/// A callable tool exposed to the orchestration runtime.
pub struct Tool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub handler: ToolHandler,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Create a Tool with a typed handler.
pub fn new_tool<F, Fut>(
    name: impl Into<String>,
    description: impl Into<String>,
    input_schema: Value,
    handler: F,
) -> Tool
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ToolResult> + Send + 'static,
{
    Tool {
        name: name.into(),
        description: description.into(),
        input_schema,
        handler: Arc::new(move |input| Box::pin(handler(input))),
    }
}

/// The set of tools the runtime may invoke, keyed by name.
///
/// Read-only after construction; the runtime dispatches through
/// [`ToolRegistry::invoke`].
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new(tools: Vec<Tool>) -> Self {
        let mut map = HashMap::new();
        for tool in tools {
            map.insert(tool.name.clone(), tool);
        }
        Self { tools: map }
    }

    /// Whether a tool with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the list of registered tools for tool-listing responses.
    pub fn tool_list(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    /// Invoke a tool by name with the runtime's argument object.
    ///
    /// An unknown name yields an error result rather than a panic, so the
    /// runtime can surface it as a failed tool call.
    pub async fn invoke(&self, name: &str, arguments: Value) -> ToolResult {
        match self.tools.get(name) {
            Some(tool) => {
                tracing::debug!(tool = %name, "invoking tool");
                (tool.handler)(arguments).await
            }
            None => ToolResult::error(format!("unknown tool: {name}")),
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registry_invokes_registered_tool() {
        let tool = new_tool(
            "add",
            "Add two numbers",
            serde_json::json!({"type": "object", "properties": {"a": {"type": "number"}, "b": {"type": "number"}}}),
            |input| async move {
                let a = input.get("a").and_then(|v| v.as_f64()).unwrap_or(0.0);
                let b = input.get("b").and_then(|v| v.as_f64()).unwrap_or(0.0);
                ToolResult::text(format!("{}", a + b))
            },
        );
        let registry = ToolRegistry::new(vec![tool]);
        let result = registry
            .invoke("add", serde_json::json!({"a": 2, "b": 3}))
            .await;
        assert!(!result.is_error);
        assert_eq!(result.content[0].text, "5");
    }

    #[tokio::test]
    async fn registry_unknown_tool_is_error_result() {
        let registry = ToolRegistry::new(vec![]);
        let result = registry.invoke("missing", serde_json::json!({})).await;
        assert!(result.is_error);
        assert!(result.content[0].text.contains("missing"));
    }

    #[test]
    fn registry_contains_and_lists() {
        let tool = new_tool("noop", "does nothing", serde_json::json!({"type": "object"}), |_| async {
            ToolResult::text("noop")
        });
        let registry = ToolRegistry::new(vec![tool]);
        assert!(registry.contains("noop"));
        assert!(!registry.contains("other"));
        assert_eq!(registry.tool_list().len(), 1);
    }

    #[test]
    fn result_to_json_shape() {
        let result = ToolResult::error("boom");
        let json = result.to_json();
        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "boom");
    }
}
