use crate::movies::intent::MoviesIntent;
use crate::movies::state::{MoviesState, SearchSlice};
use crate::mvi::Reducer;

pub struct MoviesReducer;

impl Reducer for MoviesReducer {
    type State = MoviesState;
    type Intent = MoviesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MoviesIntent::FetchStarted { list } => state.list_mut(list).start(),
            MoviesIntent::FetchSucceeded { list, response } => {
                state.list_mut(list).succeed(response)
            }
            MoviesIntent::FetchFailed { list, message } => state.list_mut(list).fail(message),
            MoviesIntent::SearchStarted { query } => {
                state.search.query = query;
                state.search.slice.start();
            }
            MoviesIntent::SearchSucceeded { query, response } => {
                state.search.query = query;
                state.search.slice.succeed(response);
            }
            MoviesIntent::DetailsStarted { movie_id } => state.detail_mut(movie_id).start(),
            MoviesIntent::DetailsSucceeded { movie_id, details } => {
                state.detail_mut(movie_id).succeed(*details)
            }
            MoviesIntent::DetailsFailed { movie_id, message } => {
                state.detail_mut(movie_id).fail(message)
            }
            MoviesIntent::ClearSearch => state.search = SearchSlice::default(),
            MoviesIntent::SetSearchQuery { query } => state.search.query = query,
        }
        state
    }
}
