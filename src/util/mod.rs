pub mod real_ip_key_extractor;
