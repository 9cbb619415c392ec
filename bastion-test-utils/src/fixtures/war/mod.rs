use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn war<'a>(&'a mut self) -> WarFixtures<'a> {
        WarFixtures { setup: self }
    }
}

pub struct WarFixtures<'a> {
    pub setup: &'a mut TestContext,
}
