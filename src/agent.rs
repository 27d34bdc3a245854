use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Declarative definition of an agent, consumed by an external orchestration
/// runtime.
///
/// The runtime reads `instruction` to drive the agent's behaviour and
/// `description` to decide when to delegate to it. `tools` names callables
/// resolved against a [`ToolRegistry`](crate::tool::ToolRegistry) at
/// invocation time; `sub_agents` holds the definitions this agent may
/// delegate to. The crate itself performs no routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Unique name for this agent.
    pub name: String,

    /// Model tag the runtime should use for this agent (e.g. "gemini-2.0-flash").
    pub model: String,

    /// System instruction for the agent.
    pub instruction: String,

    /// Capability summary the runtime matches against when delegating.
    pub description: String,

    /// Names of tools bound to this agent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,

    /// Sub-agents this agent may delegate to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_agents: Vec<AgentDefinition>,
}

impl AgentDefinition {
    /// Create a definition with no tools or sub-agents.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDefinition`] if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        instruction: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidDefinition("agent name is empty".into()));
        }
        Ok(Self {
            name,
            model: model.into(),
            instruction: instruction.into(),
            description: description.into(),
            tools: Vec::new(),
            sub_agents: Vec::new(),
        })
    }

    /// Bind a tool by name.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tools.push(tool.into());
        self
    }

    /// Attach a sub-agent definition.
    #[must_use]
    pub fn with_sub_agent(mut self, agent: AgentDefinition) -> Self {
        self.sub_agents.push(agent);
        self
    }
}
