mod test_collections;
mod test_diagnostics;
mod test_literals;
