pub mod api_mock;
pub mod notifier_mock;
