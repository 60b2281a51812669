pub mod stdio_session;
