//! WebAssembly bindings for the Food Finder game engine.
//!
//! This module exposes the game engine to JavaScript through wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::actions::GameAction;
use crate::agent::{Agent, AgentStrategy};
use crate::config::GameConfig;
use crate::game::GameState;
use crate::grid::Direction;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game on a `grid_size` x `grid_size` board
    #[wasm_bindgen(constructor)]
    pub fn new(grid_size: i32, max_steps: u32) -> Result<WasmGame, JsValue> {
        let config = GameConfig::new(grid_size, max_steps)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = GameState::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame { state })
    }

    /// Get the current game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Move the player; `direction` is "up", "down", "left" or "right".
    /// Returns the move outcome as JSON.
    #[wasm_bindgen(js_name = moveDirection)]
    pub fn move_direction(&mut self, direction: &str) -> Result<String, JsValue> {
        let direction: Direction = direction
            .parse()
            .map_err(|e: crate::game::GameError| JsValue::from_str(&e.to_string()))?;
        let outcome = self.state.move_player(direction);
        Ok(serde_json::to_string(&outcome).unwrap_or_else(|_| "null".to_string()))
    }

    /// Let the greedy policy take one step, returns the outcome as JSON
    #[wasm_bindgen(js_name = greedyMove)]
    pub fn greedy_move(&mut self) -> String {
        let outcome = self.state.greedy_move();
        serde_json::to_string(&outcome).unwrap_or_else(|_| "null".to_string())
    }

    /// Apply an action from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid action JSON: {}", e)))?;
        let events = self.state.apply_action(action);
        Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
    }

    /// Start over with new food
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Get the evaluation (status and greedy-path flag) as JSON
    pub fn evaluate(&self) -> String {
        serde_json::to_string(&self.state.evaluate()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get an agent's suggested action as JSON
    /// strategy: "Greedy" or "Random"
    #[wasm_bindgen(js_name = getAgentAction)]
    pub fn get_agent_action(&self, strategy: &str) -> String {
        let strategy = match strategy {
            "Random" => AgentStrategy::Random,
            _ => AgentStrategy::Greedy,
        };

        let mut agent = Agent::new(strategy);
        match agent.choose_action(&self.state) {
            Some(action) => serde_json::to_string(&action).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }
}
