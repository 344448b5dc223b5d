//! ledgerlint - Check a ledger journal's layout.

fn main() -> std::process::ExitCode {
    ledgerlint::cmd::check::main()
}
