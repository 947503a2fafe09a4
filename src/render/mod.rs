pub mod dial;
pub mod frame;
pub mod graph;
pub mod grid;
pub mod panel;
pub mod scene;

pub use dial::{Hand, render_dial};
pub use frame::{Frame, Screen};
pub use graph::render_graph;
pub use grid::{Grid, Line};
pub use panel::{Panel, compose};
pub use scene::Scene;
