pub mod fifty;
