use miette::Result;

pub fn exec(name: Option<&str>) -> Result<()> {
    pakt_ops::ops_use::use_packset(name)
}
