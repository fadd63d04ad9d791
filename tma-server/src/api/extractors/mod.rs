pub mod init_data;
