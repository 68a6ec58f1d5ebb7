mod visual;

pub use visual::BarVisual;
