pub mod console;
pub mod server;

#[derive(Debug)]
pub enum Action {
    Server { port: u16, dsn: String },
    Console { dsn: String },
}
