//! REST client for the projects resource.
//!
//! The resource follows the json-server conventions:
//!
//! | Operation | Request               |
//! |-----------|-----------------------|
//! | list      | `GET    <base>`       |
//! | get       | `GET    <base>/<id>`  |
//! | create    | `POST   <base>`       |
//! | update    | `PUT    <base>/<id>`  |
//! | delete    | `DELETE <base>/<id>`  |

use std::time::Duration;

use reqwest::{
    StatusCode,
    blocking::{Client, Response},
};
use tracing::{debug, instrument};

use projectdesk_core::{
    application::{ApplicationError, ports::ProjectsApi},
    domain::{Project, ProjectId, ProjectUpdate},
    error::{DeskError, DeskResult},
};

/// Where the projects resource lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/projects";

/// Request timeout when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Production `ProjectsApi` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpProjectsApi {
    client: Client,
    base_url: String,
}

impl HttpProjectsApi {
    /// Create a client for `base_url` with the given request timeout.
    ///
    /// A trailing `/` on the base URL is ignored.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> DeskResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &ProjectId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl ProjectsApi for HttpProjectsApi {
    #[instrument(skip(self), fields(url = %self.base_url))]
    fn list(&self) -> DeskResult<Vec<Project>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .map_err(transport_error)?;

        let projects: Vec<Project> = ensure_success(response)?
            .json()
            .map_err(transport_error)?;
        debug!(count = projects.len(), "Fetched projects");
        Ok(projects)
    }

    #[instrument(skip_all, fields(id = %id))]
    fn get(&self, id: &ProjectId) -> DeskResult<Option<Project>> {
        let response = self
            .client
            .get(self.item_url(id))
            .send()
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Project not found");
            return Ok(None);
        }

        let project = ensure_success(response)?
            .json()
            .map_err(transport_error)?;
        Ok(Some(project))
    }

    #[instrument(skip_all, fields(id = %project.id))]
    fn create(&self, project: &Project) -> DeskResult<Project> {
        let response = self
            .client
            .post(&self.base_url)
            .json(project)
            .send()
            .map_err(transport_error)?;

        ensure_success(response)?.json().map_err(transport_error)
    }

    #[instrument(skip_all, fields(id = %id))]
    fn update(&self, id: &ProjectId, update: &ProjectUpdate) -> DeskResult<Project> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(update)
            .send()
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(not_found(id));
        }
        ensure_success(response)?.json().map_err(transport_error)
    }

    #[instrument(skip_all, fields(id = %id))]
    fn delete(&self, id: &ProjectId) -> DeskResult<()> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(not_found(id));
        }
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> DeskResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(ApplicationError::Transport {
        reason: format!("{} answered {}", response.url(), status),
    }
    .into())
}

fn not_found(id: &ProjectId) -> DeskError {
    ApplicationError::ProjectNotFound { id: id.to_string() }.into()
}

fn transport_error(e: reqwest::Error) -> DeskError {
    ApplicationError::Transport {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead, BufReader, Read, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use super::*;

    const LIST_BODY: &str = r#"[
        {"id":"1","projectName":"Acme Tower","client":"Acme Corp","startDate":"01/05/2024","endDate":"10/05/2024"},
        {"id":2,"projectName":"Harbor Bridge","client":"Port Authority","startDate":"02/01/2025","endDate":"30/06/2025","image":"data:image/png;base64,AAAA"}
    ]"#;

    /// Answer exactly one request with `status` and `body`.
    ///
    /// The handle yields the request line that was received.
    fn serve_once(status: &'static str, body: &'static str) -> (HttpProjectsApi, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/projects", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header.trim().is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            request_line.trim_end().to_string()
        });

        let api = HttpProjectsApi::new(base_url, Duration::from_secs(5)).unwrap();
        (api, handle)
    }

    fn id(raw: &str) -> ProjectId {
        ProjectId::new(raw).unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = HttpProjectsApi::new("http://localhost:3001/projects/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(api.base_url(), "http://localhost:3001/projects");
    }

    #[test]
    fn item_url_appends_id() {
        let api = HttpProjectsApi::new(DEFAULT_BASE_URL, Duration::from_secs(1)).unwrap();
        let id = ProjectId::new("42").unwrap();
        assert_eq!(api.item_url(&id), "http://localhost:3001/projects/42");
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        // Port 9 (discard) is not expected to accept HTTP on loopback.
        let api = HttpProjectsApi::new("http://127.0.0.1:9/projects", Duration::from_secs(2))
            .unwrap();

        let err = api.list().unwrap_err();
        assert!(matches!(
            err,
            DeskError::Application(ApplicationError::Transport { .. })
        ));
        assert!(err.is_retryable());
    }

    #[test]
    fn list_decodes_camel_case_records() {
        let (api, server) = serve_once("200 OK", LIST_BODY);

        let projects = api.list().unwrap();

        assert_eq!(server.join().unwrap(), "GET /projects HTTP/1.1");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id.as_str(), "1");
        assert_eq!(projects[0].project_name, "Acme Tower");
        assert_eq!(projects[0].start_date, "01/05/2024");
        assert_eq!(projects[0].image, None);
        assert_eq!(projects[1].id.as_str(), "2");
        assert_eq!(projects[1].end_date, "30/06/2025");
        assert!(projects[1].image.is_some());
    }

    #[test]
    fn get_missing_project_is_none() {
        let (api, server) = serve_once("404 Not Found", "{}");

        assert_eq!(api.get(&id("7")).unwrap(), None);
        assert_eq!(server.join().unwrap(), "GET /projects/7 HTTP/1.1");
    }

    #[test]
    fn delete_missing_project_is_not_found() {
        let (api, server) = serve_once("404 Not Found", "{}");

        let err = api.delete(&id("7")).unwrap_err();

        assert_eq!(server.join().unwrap(), "DELETE /projects/7 HTTP/1.1");
        assert!(matches!(
            err,
            DeskError::Application(ApplicationError::ProjectNotFound { ref id }) if id == "7"
        ));
    }

    #[test]
    fn update_missing_project_is_not_found() {
        let (api, server) = serve_once("404 Not Found", "{}");
        let update = ProjectUpdate {
            client: Some("Acme Corp".into()),
            ..Default::default()
        };

        let err = api.update(&id("7"), &update).unwrap_err();

        assert_eq!(server.join().unwrap(), "PUT /projects/7 HTTP/1.1");
        assert!(matches!(
            err,
            DeskError::Application(ApplicationError::ProjectNotFound { .. })
        ));
    }

    #[test]
    fn delete_succeeds_on_2xx() {
        let (api, server) = serve_once("200 OK", "{}");

        api.delete(&id("1")).unwrap();
        assert_eq!(server.join().unwrap(), "DELETE /projects/1 HTTP/1.1");
    }

    #[test]
    fn server_error_is_a_transport_error() {
        let (api, server) = serve_once("500 Internal Server Error", "{}");

        let err = api.list().unwrap_err();
        server.join().unwrap();

        match err {
            DeskError::Application(ApplicationError::Transport { reason }) => {
                assert!(reason.contains("500"), "reason was {reason}");
            }
            other => panic!("expected a transport error, got {other:?}"),
        }
    }

    #[test]
    fn server_error_on_get_is_not_treated_as_missing() {
        let (api, server) = serve_once("503 Service Unavailable", "{}");

        let err = api.get(&id("7")).unwrap_err();
        server.join().unwrap();

        assert!(matches!(
            err,
            DeskError::Application(ApplicationError::Transport { .. })
        ));
    }
}
