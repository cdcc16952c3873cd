mod income_stream;
mod progress;
mod skill;
mod user;
