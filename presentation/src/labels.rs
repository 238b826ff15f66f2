//! Fixed interface strings in both display languages

use menu_application::CheckoutError;
use menu_domain::{Language, SortMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    SearchPlaceholder,
    SortDefault,
    SortLowHigh,
    SortHighLow,
    ViewOnly,
    SelectOption,
    NoResults,
    ProceedToOrder,
    YourOrder,
    ClearAll,
    EmptyOrder,
    Each,
    LineTotal,
    SpecialInstructions,
    GrandTotal,
    OrderViaWhatsApp,
    Close,
    AddToOrder,
    Branch,
    OpenedWhatsApp,
    LinkSaved,
    OpenLinkToSend,
    OrderingDisabled,
    WhatsAppOrderDisabled,
    CartEmpty,
    InvalidWhatsAppNumber,
}

impl Label {
    pub fn text(self, language: Language) -> &'static str {
        let (en, ar) = match self {
            Label::SearchPlaceholder => ("Search dishes...", "ابحث في الأطباق..."),
            Label::SortDefault => ("Sort by Price", "ترتيب حسب السعر"),
            Label::SortLowHigh => ("Price: Low to High", "السعر: من الأقل للأعلى"),
            Label::SortHighLow => ("Price: High to Low", "السعر: من الأعلى للأقل"),
            Label::ViewOnly => (
                "View Mode - To order, start with --order",
                "وضع العرض - للطلب، ابدأ باستخدام --order",
            ),
            Label::SelectOption => ("Select option:", "اختر الخيار:"),
            Label::NoResults => (
                "No dishes found matching your search.",
                "لم يتم العثور على أطباق تطابق بحثك.",
            ),
            Label::ProceedToOrder => ("Proceed to Order", "المتابعة للطلب"),
            Label::YourOrder => ("Your Order", "طلبك"),
            Label::ClearAll => ("Clear All", "مسح الكل"),
            Label::EmptyOrder => ("No items in your order", "لا توجد عناصر في طلبك"),
            Label::Each => ("each", "للقطعة"),
            Label::LineTotal => ("Total", "المجموع"),
            Label::SpecialInstructions => ("Special Instructions:", "تعليمات خاصة:"),
            Label::GrandTotal => ("Total:", "المجموع الكلي:"),
            Label::OrderViaWhatsApp => ("Order via WhatsApp", "طلب عبر واتساب"),
            Label::Close => ("Close", "إغلاق"),
            Label::AddToOrder => ("Add to My Order", "أضف إلى الطلب"),
            Label::Branch => ("Branch", "الفرع"),
            Label::OpenedWhatsApp => ("Opened WhatsApp with", "تم فتح واتساب عبر"),
            Label::LinkSaved => (
                "Order link saved; it is printed on exit",
                "تم حفظ رابط الطلب وسيظهر عند الخروج",
            ),
            Label::OpenLinkToSend => (
                "Open this link to send the order:",
                "افتح هذا الرابط لإرسال الطلب:",
            ),
            Label::OrderingDisabled => (
                "Ordering is not enabled for this session",
                "الطلب غير مفعل في هذه الجلسة",
            ),
            Label::WhatsAppOrderDisabled => {
                ("WhatsApp ordering is disabled", "الطلب عبر واتساب غير متاح")
            }
            Label::CartEmpty => ("Cart is empty", "السلة فارغة"),
            Label::InvalidWhatsAppNumber => {
                ("Invalid WhatsApp number", "رقم واتساب غير صالح")
            }
        };
        match language {
            Language::En => en,
            Language::Ar => ar,
        }
    }

    pub fn for_sort(mode: SortMode) -> Label {
        match mode {
            SortMode::Default => Label::SortDefault,
            SortMode::LowHigh => Label::SortLowHigh,
            SortMode::HighLow => Label::SortHighLow,
        }
    }

    pub fn for_checkout_error(error: &CheckoutError) -> Label {
        match error {
            CheckoutError::OrderModeDisabled => Label::OrderingDisabled,
            CheckoutError::WhatsAppOrderDisabled => Label::WhatsAppOrderDisabled,
            CheckoutError::EmptyCart => Label::CartEmpty,
            CheckoutError::Domain(_) => Label::InvalidWhatsAppNumber,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text_per_language() {
        assert_eq!(Label::YourOrder.text(Language::En), "Your Order");
        assert_eq!(Label::YourOrder.text(Language::Ar), "طلبك");
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(
            Label::for_sort(SortMode::LowHigh).text(Language::En),
            "Price: Low to High"
        );
        assert_eq!(Label::for_sort(SortMode::Default), Label::SortDefault);
    }

    #[test]
    fn test_checkout_error_labels() {
        let label = Label::for_checkout_error(&CheckoutError::EmptyCart);
        assert_eq!(label.text(Language::En), "Cart is empty");
        assert_eq!(label.text(Language::Ar), "السلة فارغة");
        assert_eq!(
            Label::for_checkout_error(&CheckoutError::Domain(
                menu_domain::DomainError::InvalidPhoneNumber("n/a".into())
            )),
            Label::InvalidWhatsAppNumber
        );
    }
}
