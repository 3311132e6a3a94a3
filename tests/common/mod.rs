pub mod synthetic_points;
