mod test_entrypoints;
