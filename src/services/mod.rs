pub mod waitlist_service;
