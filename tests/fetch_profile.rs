// tests/fetch_profile.rs
//
// Runs the fetch path against a throwaway local HTTP server that serves the
// saved community pages.
//
use reqwest::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use steamprofile::infrastructure::CommunityClient;
use steamprofile::{ProfileError, ProfileService, UserId};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const STEAM64: &str = "76561198069463927";

type Routes = HashMap<String, (u16, String)>;

struct Server {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap()
}

fn page(suffix: &str) -> String {
    format!("/profiles/{STEAM64}/{suffix}")
}

fn public_routes() -> Routes {
    HashMap::from([
        (page(""), (200, fixture("main_public.html"))),
        (page("badges/1/"), (200, fixture("badge_1.html"))),
        (page("badges/"), (200, fixture("badges.html"))),
        (page("games/?tab=all"), (200, fixture("games.html"))),
        (page("wishlist/"), (200, fixture("wishlist.html"))),
        (page("ajaxaliases/"), (200, fixture("aliases.json"))),
    ])
}

async fn serve(routes: Routes) -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let routes = Arc::new(routes);

    let seen = Arc::clone(&requests);
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 16 * 1024];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                seen.lock().unwrap().push(path.clone());

                let (status, body) = routes
                    .get(&path)
                    .cloned()
                    .unwrap_or((404, "not found".to_string()));
                let reason = if status == 200 { "OK" } else { "Not Found" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    Server { base_url, requests }
}

fn service(base_url: &str) -> ProfileService {
    let client = Client::builder().no_proxy().build().unwrap();
    ProfileService::new(CommunityClient::new(client, base_url))
}

fn user() -> UserId {
    STEAM64.parse().unwrap()
}

#[tokio::test]
async fn fetches_every_page_of_a_public_profile() {
    let server = serve(public_routes()).await;

    let profile = service(&server.base_url).fetch(&user()).await.unwrap();

    assert_eq!(profile.url, format!("{}{}", server.base_url, page("")));
    assert_eq!(profile.persona, "Evan");
    assert_eq!(profile.badges.map(|b| b.len()), Some(2));
    assert_eq!(profile.games.map(|g| g.len()), Some(2));
    assert_eq!(profile.wishlist.map(|w| w.len()), Some(2));
    assert_eq!(server.requests.lock().unwrap().len(), 6);
}

#[tokio::test]
async fn private_profile_only_fetches_main_page() {
    let mut routes = public_routes();
    routes.insert(page(""), (200, fixture("main_private.html")));
    let server = serve(routes).await;

    let profile = service(&server.base_url).fetch(&user()).await.unwrap();

    assert!(profile.private);
    assert!(!profile.has_personal_fields());
    assert_eq!(*server.requests.lock().unwrap(), vec![page("")]);
}

#[tokio::test]
async fn error_page_stops_the_fetch() {
    let mut routes = public_routes();
    routes.insert(page(""), (200, fixture("main_error.html")));
    let server = serve(routes).await;

    let result = service(&server.base_url).fetch(&user()).await;

    assert!(matches!(result, Err(ProfileError::Fetch(_))));
    assert_eq!(*server.requests.lock().unwrap(), vec![page("")]);
}

#[tokio::test]
async fn http_errors_are_fetch_errors() {
    let server = serve(Routes::new()).await;

    let result = service(&server.base_url).fetch(&user()).await;

    assert!(matches!(result, Err(ProfileError::Fetch(_))));
}

#[tokio::test]
async fn valid_ids_either_build_or_fail_to_fetch() {
    // Bind then drop a listener so the port is known to be closed
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);

    for id in ["76561197960265728", "76561198069463927", "76561198065605885"] {
        let user = UserId::steam64(id).unwrap();
        match service(&base_url).fetch(&user).await {
            Ok(_) => {}
            Err(ProfileError::Fetch(_)) => {}
            Err(other) => panic!("unexpected error for {id}: {other}"),
        }
    }
}
