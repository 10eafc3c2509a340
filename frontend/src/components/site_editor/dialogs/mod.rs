pub mod export_notice;
