//! cellar - Keep a beer cellar in drinking order.

fn main() -> std::process::ExitCode {
    cellar::cmd::main()
}
