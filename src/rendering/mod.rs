pub mod page;

pub use page::SimulatedPage;
