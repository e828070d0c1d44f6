pub mod extract;
pub mod monitor;
pub mod normalize;
pub mod opener;
pub mod processor;
pub mod supervisor;
