pub mod cloudseim;
