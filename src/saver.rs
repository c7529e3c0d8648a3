use crate::messages::ResponseMessage;
use crate::persist::{read_urls, write_urls};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use tracing::{error, info};

pub enum SaverMessage {
    Save(PathBuf, Vec<String>),
    Load(PathBuf),
}

pub struct Saver {
    receiver: Receiver<SaverMessage>,
    response_sender: Sender<ResponseMessage>,
}

impl Saver {
    pub fn new(receiver: Receiver<SaverMessage>, response_sender: Sender<ResponseMessage>) -> Self {
        Self {
            receiver,
            response_sender,
        }
    }

    pub fn run(&self) {
        while let Ok(message) = self.receiver.recv() {
            let response = match message {
                SaverMessage::Save(path, lines) => match write_urls(&path, &lines) {
                    Ok(written) => {
                        info!("{} URLs saved successfully to {:?}", written, path);
                        ResponseMessage::UrlsSaved(Ok((path, written)))
                    }
                    Err(e) => {
                        error!("{}", e);
                        ResponseMessage::UrlsSaved(Err(e.to_string()))
                    }
                },
                SaverMessage::Load(path) => match read_urls(&path) {
                    Ok(lines) => ResponseMessage::UrlsLoaded(Ok((path, lines))),
                    Err(e) => {
                        error!("Error loading URLs from file: {}", e);
                        ResponseMessage::UrlsLoaded(Err(e.to_string()))
                    }
                },
            };

            if let Err(e) = self.response_sender.send(response) {
                error!("Failed to send saver response: {}", e);
                break;
            }
        }
    }
}

pub fn spawn_saver() -> (Sender<SaverMessage>, Receiver<ResponseMessage>) {
    let (sender, receiver) = std::sync::mpsc::channel();
    let (response_sender, response_receiver) = std::sync::mpsc::channel();
    thread::spawn(move || {
        let saver = Saver::new(receiver, response_sender);
        saver.run();
    });
    (sender, response_receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;
    use uuid::Uuid;

    fn setup_test_dir() -> PathBuf {
        let test_dir = std::env::temp_dir().join(format!("test_saver_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        test_dir
    }

    fn cleanup_test_dir(test_dir: &Path) {
        let _ = fs::remove_dir_all(test_dir);
    }

    #[test]
    fn test_save_then_load_through_saver() {
        let test_dir = setup_test_dir();
        let file = test_dir.join("pile.txt");
        let (sender, receiver) = spawn_saver();

        let urls = vec!["https://a.example".to_string(), "https://b.example".to_string()];
        sender
            .send(SaverMessage::Save(file.clone(), urls.clone()))
            .unwrap();
        match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            ResponseMessage::UrlsSaved(Ok((path, written))) => {
                assert_eq!(path, file);
                assert_eq!(written, 2);
            }
            _ => panic!("Expected a successful save"),
        }

        sender.send(SaverMessage::Load(file.clone())).unwrap();
        match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            ResponseMessage::UrlsLoaded(Ok((path, lines))) => {
                assert_eq!(path, file);
                assert_eq!(lines, urls);
            }
            _ => panic!("Expected a successful load"),
        }

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_load_failure_is_reported() {
        let test_dir = setup_test_dir();
        let (sender, receiver) = spawn_saver();

        sender
            .send(SaverMessage::Load(test_dir.join("missing.txt")))
            .unwrap();
        match receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            ResponseMessage::UrlsLoaded(Err(message)) => {
                assert!(message.contains("missing.txt"), "got: {}", message)
            }
            _ => panic!("Expected a load error"),
        }

        cleanup_test_dir(&test_dir);
    }
}
