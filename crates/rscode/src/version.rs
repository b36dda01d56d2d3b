use crate::exit::{CliResult, SUCCESS};

pub fn run() -> CliResult<i32> {
    println!("{}", version_line());
    Ok(SUCCESS)
}

fn version_line() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_line_names_package() {
        assert_eq!(version_line(), format!("rscode v{}", env!("CARGO_PKG_VERSION")));
    }
}
