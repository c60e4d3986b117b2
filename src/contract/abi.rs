//! Course-evaluation contract bindings.
//!
//! The contract is externally deployed; only its method surface is declared
//! here. Argument and return shapes follow the published interface: course
//! identifiers are `uint256`, ratings an ordered `uint256[]` passed through
//! exactly as the caller supplied it.

use alloy::primitives::{Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// Select a course for evaluation.
    function chooseCourse(uint256 courseId);

    /// Enroll the sender in a course.
    function enrollCourse(uint256 courseId);

    /// Submit an ordered list of rating scores for a course.
    function submitReview(uint256 courseId, uint256[] ratings);

    /// Read the stored scores for a course.
    function viewReview(uint256 courseId) returns (uint256[] memory);
}

/// Call data for `chooseCourse(courseId)`.
pub fn encode_choose_course(course_id: U256) -> Bytes {
    chooseCourseCall { courseId: course_id }.abi_encode().into()
}

/// Call data for `enrollCourse(courseId)`.
pub fn encode_enroll_course(course_id: U256) -> Bytes {
    enrollCourseCall { courseId: course_id }.abi_encode().into()
}

/// Call data for `submitReview(courseId, ratings)`. The ratings sequence is
/// encoded unmodified; length and value-range checks are the contract's.
pub fn encode_submit_review(course_id: U256, ratings: Vec<U256>) -> Bytes {
    submitReviewCall {
        courseId: course_id,
        ratings,
    }
    .abi_encode()
    .into()
}

/// Call data for `viewReview(courseId)`.
pub fn encode_view_review(course_id: U256) -> Bytes {
    viewReviewCall { courseId: course_id }.abi_encode().into()
}

/// Decode the `viewReview` return payload into the stored score list.
pub fn decode_view_review(data: &[u8]) -> Result<Vec<U256>, alloy::sol_types::Error> {
    viewReviewCall::abi_decode_returns(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::keccak256;
    use alloy::sol_types::SolValue;

    #[test]
    fn test_selectors_match_signatures() {
        let expected = &keccak256("chooseCourse(uint256)".as_bytes())[..4];
        assert_eq!(&encode_choose_course(U256::from(1))[..4], expected);

        let expected = &keccak256("submitReview(uint256,uint256[])".as_bytes())[..4];
        assert_eq!(
            &encode_submit_review(U256::from(1), vec![U256::from(5)])[..4],
            expected
        );
    }

    #[test]
    fn test_encoded_call_carries_course_id() {
        let data = encode_enroll_course(U256::from(42));
        let decoded = enrollCourseCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.courseId, U256::from(42));
    }

    #[test]
    fn test_view_review_decode() {
        let scores: Vec<U256> = (1u64..=5).map(U256::from).collect();
        let payload = scores.abi_encode();

        let decoded = decode_view_review(&payload).unwrap();
        assert_eq!(decoded, scores);
    }

    #[test]
    fn test_view_review_decode_rejects_garbage() {
        assert!(decode_view_review(&[0xde, 0xad, 0xbe, 0xef]).is_err());
    }
}
