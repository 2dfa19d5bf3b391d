pub use test_controller::TestController;
