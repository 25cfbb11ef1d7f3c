use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::cart::model::LineItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartRecord;

/// One JSON file per user under `root`.
///
/// Writes land in a temporary sibling first and are renamed into place, so a
/// reader never sees a half-written cart.
#[derive(Debug, Clone)]
pub struct JsonFileCartRepository {
    root: PathBuf,
}

impl JsonFileCartRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, user_id: &UserId) -> PathBuf {
        self.root
            .join(format!("cart_{}.json", file_stem(user_id.as_str())))
    }
}

/// Escapes every byte outside `[A-Za-z0-9_-]` as `%XX`.
fn file_stem(user_id: &str) -> String {
    let mut stem = String::with_capacity(user_id.len());
    for byte in user_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
    }
    stem
}

impl CartRepository for JsonFileCartRepository {
    fn read(&self, user_id: &UserId) -> Result<Vec<LineItem>, RepositoryError> {
        let path = self.path_for(user_id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::error!("Stored cart {} is not UTF-8: {e}", path.display());
                return Err(RepositoryError::Corrupted);
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}", path.display());
                return Err(RepositoryError::Unavailable);
            }
        };

        CartRecord::decode(&raw)?.into_items(user_id)
    }

    fn write(&self, user_id: &UserId, items: &[LineItem]) -> Result<(), RepositoryError> {
        let contents = CartRecord::new(user_id, items).encode()?;
        let path = self.path_for(user_id);
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root)
            .and_then(|()| fs::write(&tmp, contents))
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|e| {
                tracing::warn!("Failed to write {}: {e}", path.display());
                RepositoryError::Persistence
            })
    }

    fn clear(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        let path = self.path_for(user_id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::warn!("Failed to remove {}: {e}", path.display());
                Err(RepositoryError::Persistence)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartItemPayload;
    use business::domain::cart::value_objects::ProductId;

    fn item(id: &str, price: u64, count: u32) -> LineItem {
        LineItem::from_repository(
            CartItemPayload {
                id: ProductId::new(id),
                title: format!("Product {id}"),
                price,
                description: Some("Stoneware".to_string()),
                category_id: None,
                image: Some(format!("https://cdn.example.com/{id}.jpg")),
            },
            count,
        )
    }

    #[test]
    fn should_escape_unsafe_characters_in_file_name() {
        assert_eq!(file_stem("abc-DEF_123"), "abc-DEF_123");
        assert_eq!(file_stem("../etc"), "%2E%2E%2Fetc");
        assert_eq!(file_stem("a b"), "a%20b");
    }

    #[test]
    fn should_return_empty_list_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileCartRepository::new(dir.path());

        assert!(repository.read(&UserId::new("u1")).unwrap().is_empty());
    }

    #[test]
    fn should_round_trip_items_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileCartRepository::new(dir.path());
        let user_id = UserId::new("u1");
        let items = vec![item("p2", 2500, 1), item("p1", 1000, 3)];

        repository.write(&user_id, &items).unwrap();

        assert_eq!(repository.read(&user_id).unwrap(), items);
        assert!(!repository.path_for(&user_id).with_extension("json.tmp").exists());
    }

    #[test]
    fn should_create_missing_root_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileCartRepository::new(dir.path().join("nested").join("carts"));
        let user_id = UserId::new("u1");

        repository.write(&user_id, &[item("p1", 10, 1)]).unwrap();

        assert!(repository.path_for(&user_id).exists());
    }

    #[test]
    fn should_clear_record_idempotently() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileCartRepository::new(dir.path());
        let user_id = UserId::new("u1");
        repository.write(&user_id, &[item("p1", 10, 1)]).unwrap();

        repository.clear(&user_id).unwrap();
        repository.clear(&user_id).unwrap();

        assert!(!repository.path_for(&user_id).exists());
        assert!(repository.read(&user_id).unwrap().is_empty());
    }

    #[test]
    fn should_report_truncated_file_as_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileCartRepository::new(dir.path());
        let user_id = UserId::new("u1");
        fs::write(repository.path_for(&user_id), "{\"userId\":\"u1\",\"items\":[").unwrap();

        assert_eq!(repository.read(&user_id), Err(RepositoryError::Corrupted));
    }

    #[test]
    fn should_report_non_utf8_file_as_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileCartRepository::new(dir.path());
        let user_id = UserId::new("u1");
        fs::write(repository.path_for(&user_id), b"{\"userId\":\"u1\xFF\"}").unwrap();

        assert_eq!(repository.read(&user_id), Err(RepositoryError::Corrupted));
    }

    #[test]
    fn should_report_unreadable_path_as_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileCartRepository::new(dir.path());
        let user_id = UserId::new("u1");
        fs::create_dir(repository.path_for(&user_id)).unwrap();

        assert_eq!(repository.read(&user_id), Err(RepositoryError::Unavailable));
    }

    #[test]
    fn should_fail_write_when_root_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let repository = JsonFileCartRepository::new(&blocker);

        let result = repository.write(&UserId::new("u1"), &[item("p1", 10, 1)]);

        assert_eq!(result, Err(RepositoryError::Persistence));
    }
}
