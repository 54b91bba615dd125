mod use_status_poller;

pub use use_status_poller::use_status_poller;
