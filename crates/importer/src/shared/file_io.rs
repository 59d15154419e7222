//! Источник и приёмник файлов: импорт не зависит от браузера
//! и конкретного хранилища.

use super::error::ImportError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

/// Выбранный пользователем файл, читаемый как текст
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Отображаемое имя файла
    fn name(&self) -> &str;

    async fn read_text(&self) -> Result<String, ImportError>;
}

/// Приёмник сгенерированных файлов (например, шаблона)
#[async_trait]
pub trait FileSink: Send + Sync {
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), ImportError>;
}

// ============================================================================
// Локальная файловая система
// ============================================================================

pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

#[async_trait]
impl FileSource for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_text(&self) -> Result<String, ImportError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ImportError::FileAccess {
                name: self.name.clone(),
                reason: e.to_string(),
            })?;

        String::from_utf8(bytes).map_err(|_| ImportError::Unreadable(self.name.clone()))
    }
}

/// Пишет файлы в директорию, создавая её при необходимости
pub struct LocalDir {
    dir: PathBuf,
}

impl LocalDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl FileSink for LocalDir {
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), ImportError> {
        let to_error = |e: std::io::Error| ImportError::FileWrite {
            name: name.to_string(),
            reason: e.to_string(),
        };

        tokio::fs::create_dir_all(&self.dir).await.map_err(to_error)?;
        let path = self.dir.join(name);
        tokio::fs::write(&path, bytes).await.map_err(to_error)?;

        tracing::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

// ============================================================================
// В памяти
// ============================================================================

/// Содержимое файла уже в памяти (загрузки, тесты)
pub struct InMemoryFile {
    name: String,
    content: String,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl FileSource for InMemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_text(&self) -> Result<String, ImportError> {
        Ok(self.content.clone())
    }
}

/// Сохраняет записанные файлы
#[derive(Default)]
pub struct MemorySink {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Содержимое последнего файла, записанного под именем `name`
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().ok()?;
        files
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, bytes)| bytes.clone())
    }
}

#[async_trait]
impl FileSink for MemorySink {
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), ImportError> {
        let mut files = self.files.lock().map_err(|e| ImportError::FileWrite {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        files.push((name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_dir_then_local_file() {
        let dir = std::env::temp_dir().join(format!("policy-import-{}", uuid::Uuid::new_v4()));
        let sink = LocalDir::new(&dir);
        sink.write("services.csv", b"serviceName,price\nMRI,900\n")
            .await
            .unwrap();

        let source = LocalFile::new(dir.join("services.csv"));
        assert_eq!(source.name(), "services.csv");
        assert_eq!(
            source.read_text().await.unwrap(),
            "serviceName,price\nMRI,900\n"
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_file_is_file_access_error() {
        let source = LocalFile::new(std::env::temp_dir().join("does-not-exist-4f1c.csv"));
        let err = source.read_text().await.unwrap_err();
        assert!(matches!(err, ImportError::FileAccess { .. }));
        assert!(err.is_structural());
    }

    #[tokio::test]
    async fn test_non_utf8_file_is_unreadable() {
        let dir = std::env::temp_dir().join(format!("policy-import-{}", uuid::Uuid::new_v4()));
        LocalDir::new(&dir)
            .write("latin1.csv", &[0x73, 0x65, 0xE9, 0x0A])
            .await
            .unwrap();

        let err = LocalFile::new(dir.join("latin1.csv"))
            .read_text()
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Unreadable(ref name) if name == "latin1.csv"));
        assert!(err.is_structural());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_memory_sink_keeps_last_write() {
        let sink = MemorySink::new();
        sink.write("a.csv", b"one").await.unwrap();
        sink.write("a.csv", b"two").await.unwrap();
        assert_eq!(sink.get("a.csv").unwrap(), b"two");
        assert!(sink.get("b.csv").is_none());
    }
}
