pub(crate) mod head;
