pub mod chart;
pub mod form;
pub mod result;
pub mod view;

pub use view::Dashboard;
