use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info};

use serde::Deserialize;
use synopsis_core::io::{get_filename, list_files, read_training_file};
use synopsis_core::model::generation_input::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use synopsis_core::{BigramModel, GenerationInput, SynopsisError};

/// Folder holding the `.txt` corpora.
const DATA_DIR: &str = "./data";

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	max_length: Option<usize>,
	min_length: Option<usize>,
	count: Option<usize>,
}

#[derive(Deserialize)]
struct SampleParams {
	sample_size: Option<usize>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
}

struct SharedData {
	model: BigramModel,
	corpus_names: Vec<String>,
}

impl GenerateParams {
	/// Builds a validated generation input, missing values take the defaults.
	fn generation_input(&self) -> Result<GenerationInput, SynopsisError> {
		let mut input = GenerationInput::new(
			self.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
			self.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
		)?;
		input.count = self.count.unwrap_or(1);
		Ok(input)
	}
}

/// Maps a model error to an HTTP response.
fn error_response(e: SynopsisError) -> HttpResponse {
	match e {
		SynopsisError::InvalidLength { .. } => HttpResponse::BadRequest().body(e.to_string()),
		SynopsisError::UntrainedModel => HttpResponse::Conflict().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` synopses (one by default) and returns them one per line.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return error_response(e),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match shared_data.model.generate_batch(&input) {
		Ok(synopses) => HttpResponse::Ok().body(synopses.join("\n")),
		Err(e) => error_response(e),
	}
}

#[get("/v1/statistics")]
async fn get_statistics(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().json(shared_data.model.get_statistics())
}

/// HTTP GET endpoint `/v1/bigrams`
///
/// Returns the first entries of the transition table, one word per line,
/// with at most ten successors shown per word.
#[get("/v1/bigrams")]
async fn get_bigrams(data: web::Data<Mutex<SharedData>>, query: web::Query<SampleParams>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let lines: Vec<String> = shared_data
		.model
		.bigram_sample(query.sample_size.unwrap_or(10))
		.into_iter()
		.map(|(word, next_words)| {
			let shown: Vec<&str> = next_words.iter().take(10).map(String::as_str).collect();
			let ellipsis = if next_words.len() > 10 { " ..." } else { "" };
			format!("{word}: {}{ellipsis}", shown.join(" "))
		})
		.collect();
	HttpResponse::Ok().body(lines.join("\n"))
}

/// HTTP PUT endpoint `/v1/train`
///
/// Retrains the shared model on the raw request body.
#[put("/v1/train")]
async fn put_train(data: web::Data<Mutex<SharedData>>, body: String) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	shared_data.model.load_training_data(&body);
	shared_data.corpus_names.clear();
	HttpResponse::Ok().json(shared_data.model.get_statistics())
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files(DATA_DIR, "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(e) => {
			error!("Failed to list corpora: {e}");
			HttpResponse::InternalServerError().body("Failed to list corpora")
		}
	}
}

#[get("/v1/loaded_corpus")]
async fn get_loaded_corpus(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.corpus_names.join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpus`
///
/// Concatenates the named corpora from `./data` and retrains on the result.
/// Training resets the model, so the previous corpora are dropped.
#[put("/v1/load_corpus")]
async fn put_corpus(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let mut text = String::new();
	let mut loaded = Vec::with_capacity(corpus_names.len());
	for name in corpus_names {
		if name.contains(['/', '\\']) || name.contains("..") {
			return HttpResponse::BadRequest().body(format!("Invalid corpus name: {name}"));
		}
		let corpus_path = format!("{DATA_DIR}/{name}.txt");
		match read_training_file(&corpus_path) {
			Ok(content) => {
				text.push_str(&content);
				text.push('\n');
			}
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}")),
		}
		match get_filename(&corpus_path) {
			Ok(filename) => loaded.push(filename),
			Err(e) => return HttpResponse::BadRequest().body(format!("Invalid corpus name: {e}")),
		}
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.model.load_training_data(&text);
	info!("Loaded corpora: {}", loaded.join(", "));
	shared_data.corpus_names = loaded;

	HttpResponse::Ok().json(shared_data.model.get_statistics())
}

/// Main entry point for the server.
///
/// Creates an untrained model, wraps it in a `Mutex` since generation
/// advances the model's random generator, and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Corpora are read from `./data/<name>.txt`.
/// - Log level is controlled with `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let shared_data = SharedData {
		model: BigramModel::new(),
		corpus_names: Vec::new(),
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	info!("Listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_statistics)
			.service(get_bigrams)
			.service(put_train)
			.service(get_corpora)
			.service(get_loaded_corpus)
			.service(put_corpus)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;

	use actix_web::http::StatusCode;
	use actix_web::test;

	fn shared(text: &str) -> web::Data<Mutex<SharedData>> {
		let mut model = BigramModel::with_seed(3);
		model.load_training_data(text);
		web::Data::new(Mutex::new(SharedData { model, corpus_names: Vec::new() }))
	}

	#[actix_web::test]
	async fn test_generate() {
		let app = test::init_service(App::new().app_data(shared("The cat sat. The dog ran.")).service(get_generated)).await;

		let req = test::TestRequest::get().uri("/v1/generate?max_length=10&min_length=2&count=3").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let body = String::from_utf8(body.to_vec()).unwrap();

		let lines: Vec<&str> = body.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines.iter().all(|line| line.starts_with("The")));
	}

	#[actix_web::test]
	async fn test_generate_invalid_bounds() {
		let app = test::init_service(App::new().app_data(shared("The cat sat.")).service(get_generated)).await;

		let req = test::TestRequest::get().uri("/v1/generate?max_length=5&min_length=10").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn test_generate_untrained() {
		let app = test::init_service(App::new().app_data(shared("")).service(get_generated)).await;

		let req = test::TestRequest::get().uri("/v1/generate").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::CONFLICT);
	}

	#[actix_web::test]
	async fn test_train_then_statistics() {
		let app = test::init_service(
			App::new().app_data(shared("")).service(put_train).service(get_statistics),
		)
		.await;

		let req = test::TestRequest::put().uri("/v1/train").set_payload("The cat sat. The dog ran.").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let req = test::TestRequest::get().uri("/v1/statistics").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, r#"{"unique_words":4,"total_transitions":5,"sentence_starters":1}"#);
	}

	#[actix_web::test]
	async fn test_bigrams() {
		let app = test::init_service(App::new().app_data(shared("The cat sat. The dog ran.")).service(get_bigrams)).await;

		let req = test::TestRequest::get().uri("/v1/bigrams?sample_size=2").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "The: cat dog\ncat: sat.");
	}

	#[actix_web::test]
	async fn test_load_corpus_missing_name() {
		let app = test::init_service(App::new().app_data(shared("")).service(put_corpus)).await;

		let req = test::TestRequest::put().uri("/v1/load_corpus?names=%20").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn test_load_corpus_rejects_paths() {
		let app = test::init_service(App::new().app_data(shared("")).service(put_corpus)).await;

		let req = test::TestRequest::put().uri("/v1/load_corpus?names=../secret").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}
}
