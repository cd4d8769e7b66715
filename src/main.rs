use anyhow::{bail, Context, Result};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("usage: ncaview <data.csv>"),
    };
    if args.next().is_some() {
        bail!("ncaview takes a single CSV path and no flags");
    }

    ncaview::session::run(&path).with_context(|| format!("analysis of '{path}' failed"))
}
