// Widget implementations

mod dropdown;

pub use dropdown::{dropdown, Dropdown, DropdownConfig};
