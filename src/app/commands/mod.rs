pub mod list_published_url;
