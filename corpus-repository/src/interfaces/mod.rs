mod documents;

pub use documents::DocumentsRepository;
