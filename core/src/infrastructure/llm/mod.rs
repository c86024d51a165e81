pub mod groq_client;
