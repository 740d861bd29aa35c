mod fake_manifest_tool;
mod stub_renderer;

pub use fake_manifest_tool::FakeManifestTool;
pub use scripted_prompter::ScriptedPrompter;
pub use stub_renderer::StubRenderer;
