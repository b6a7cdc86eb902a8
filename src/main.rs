use bevy::app::AppExit;

fn main() -> AppExit {
    arcade_combatants::game::run()
}
