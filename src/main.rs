use std::{env, io};

use dispatch::demo::err::DispatchError;

fn main() -> Result<(), DispatchError> {
    if env::var("DISPATCH_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("DISPATCH_LOG")
            .write_style("DISPATCH_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args = env::args().skip(1).collect::<Vec<_>>();
    dispatch::run_args(&args, io::stdout().lock())
}
