pub mod get_prompts;
