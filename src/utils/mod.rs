pub mod leptos_owner;
pub mod notifier;
pub mod panic_hook;
