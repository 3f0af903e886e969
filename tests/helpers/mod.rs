pub mod mock_controller;
pub mod utilities;
