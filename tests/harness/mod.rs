#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use fake_kubectl::FakeKubeTools;
pub(crate) use test_context::TestContext;
