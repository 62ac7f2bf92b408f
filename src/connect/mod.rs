pub mod animation;
pub mod connect_layout;
pub mod connect_state;
pub mod connect_view;
pub mod tick_timer;
