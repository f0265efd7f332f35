fn main() -> anyhow::Result<()> {
  let session = folio_lib::start()?;

  println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
  Ok(())
}
